//! # Response Formatting
//!
//! Success envelopes. Every payload is carried under `data`.

use serde::Serialize;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![json!({"id": "1"}), json!({"id": "2"})]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][1]["id"], "2");
    }

    #[test]
    fn test_empty_list_response() {
        let response: ListResponse<serde_json::Value> = ListResponse::new(Vec::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({"data": [], "count": 0}));
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"id": "1", "title": "T"}));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["title"], "T");
    }
}
