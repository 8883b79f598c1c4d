use crate::api::common::{AddressDto, ContactInfoDto};
use crate::domain::model::{Address, ContactInfo};

pub fn to_wire(address: Option<&Address>) -> Option<AddressDto> {
    let address = address?;
    Some(AddressDto {
        line1: address.line1.clone(),
        line2: address.line2.clone(),
        city: address.city.clone(),
        postal_code: address.postal_code.clone(),
        state_name: address.state_name.clone(),
        state_id: address.state_id,
        country_id: address.country_id,
    })
}

pub fn contact_to_wire(contact: Option<&ContactInfo>) -> Option<ContactInfoDto> {
    let contact = contact?;
    Some(ContactInfoDto {
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        company_name: contact.company_name.clone(),
        email: contact.email.clone(),
        mobile_number: contact.mobile_number.clone(),
        sms_notification: contact.sms_notification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_propagates() {
        assert!(to_wire(None).is_none());
        assert!(contact_to_wire(None).is_none());
    }

    #[test]
    fn test_address_fields_copied() {
        let address = Address {
            line1: Some("1 Main St".to_string()),
            city: Some("Austin".to_string()),
            postal_code: Some("78701".to_string()),
            state_id: Some(44),
            country_id: Some(1),
            ..Default::default()
        };

        let dto = to_wire(Some(&address)).unwrap();
        assert_eq!(dto.line1.as_deref(), Some("1 Main St"));
        assert_eq!(dto.state_id, Some(44));
        assert_eq!(dto.line2, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["postalCode"], "78701");
        assert!(json.get("line2").is_none());
    }

    #[test]
    fn test_contact_fields_copied() {
        let contact = ContactInfo {
            email: Some("a@b.c".to_string()),
            sms_notification: Some(true),
            ..Default::default()
        };
        let dto = contact_to_wire(Some(&contact)).unwrap();
        assert_eq!(dto.email.as_deref(), Some("a@b.c"));
        assert_eq!(dto.sms_notification, Some(true));
    }
}
