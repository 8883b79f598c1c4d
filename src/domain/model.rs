//! Domain models handed to SDK callers. Wire types live in `crate::api`.

pub mod auth;
pub mod common;
pub mod devices;
pub mod enums;
pub mod settings;
pub mod transactions;
pub mod ttp;

pub use auth::{AuthenticationResult, StoredCredentials, StoredToken, StoredTtpJwt};
pub use common::{
    Address, Amount, AvailableOperation, AvsResponse, CardDetails, ContactInfo,
    ElectronicCheckDetails, EmvTags, RawTag, ReceiptAmount, Source, SuggestedTip,
    TransactionResponseDetails,
};
pub use devices::{DeviceInfo, DeviceUser, DevicesResponse};
pub use enums::{
    AvsAction, AvsCodeGroup, AvsResult, CardDataSource, CardTokenType,
    CardholderAuthenticationMethod, CreateMethodId, EmvFallbackCondition,
    EmvFallbackLastChipRead, TransactionStatus, TransactionType,
};
pub use settings::{
    ApiPermission, ApiPermissionsResponse, AvsOptions, NamedOption, PaymentProcessor,
    PaymentSettings, SettlementBatchTimeSlot,
};
pub use transactions::{
    AuthorizationRequest, AuthorizationResponse, CalculateAmountRequest,
    CalculateAmountResponse, L2Data, L3Data, RefundRequest, TransactionDetails,
    TransactionFilters, TransactionProduct, TransactionReceipt, TransactionResponse,
    TransactionSummary, TransactionsPage,
};
pub use ttp::{
    DeviceModelCheck, DeviceProfile, LocationPermissionStatus, Merchant, OsVersionCheck,
    PlatformEvent, PlatformReaderEvent, PlatformTransaction, ReaderTransactionRequest,
    TapToPayEntitlementStatus, TtpCompatibilityResult, TtpCustomEvent, TtpCvmData, TtpEvent,
    TtpReaderEvent, TtpStatus, TtpTransactionResult, TtpTransactionStatus,
};
