use crate::domain::model::TransactionFilters;

use super::enums;

/// 轉成交易列表的 query 參數；未設定的欄位不送
pub fn to_query(filters: Option<&TransactionFilters>) -> Vec<(&'static str, String)> {
    let Some(filters) = filters else {
        return Vec::new();
    };

    let mut query = Vec::new();
    if let Some(page) = filters.page {
        query.push(("page", page.to_string()));
    }
    if let Some(page_size) = filters.page_size {
        query.push(("pageSize", page_size.to_string()));
    }
    if let Some(order_by) = &filters.order_by {
        query.push(("orderBy", order_by.clone()));
    }
    if let Some(asc) = filters.asc {
        query.push(("asc", asc.to_string()));
    }
    if let Some(method) = filters.create_method_id {
        query.push(("createMethodId", enums::create_method_code(method).to_string()));
    }
    if let Some(created_by) = &filters.created_by_id {
        query.push(("createdById", created_by.clone()));
    }
    if let Some(batch_id) = &filters.batch_id {
        query.push(("batchId", batch_id.clone()));
    }
    if let Some(no_batch) = filters.no_batch {
        query.push(("noBatch", no_batch.to_string()));
    }
    query
}
