//! Wire types for business reference-list responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An entry of `/get_business_types` or `/get_business_roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUuid {
    pub uuid: String,
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessTypesResponse {
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    pub business_types: Vec<NamedUuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRolesResponse {
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    pub business_roles: Vec<NamedUuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaicsSubcategory {
    pub code: u32,
    pub subcategory: String,
}

/// NAICS subcategories keyed by top-level category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaicsCategoriesResponse {
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    pub naics_categories: BTreeMap<String, Vec<NaicsSubcategory>>,
}

impl NaicsCategoriesResponse {
    /// Find the subcategory carrying `code`.
    pub fn find(&self, code: u32) -> Option<(&str, &NaicsSubcategory)> {
        self.naics_categories.iter().find_map(|(category, subs)| {
            subs.iter()
                .find(|s| s.code == code)
                .map(|s| (category.as_str(), s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_types() {
        let r: BusinessTypesResponse = serde_json::from_str(
            r#"{"success":true,"status":"SUCCESS","business_types":[
                {"uuid":"a1","name":"corporation","label":"Corporation"}]}"#,
        )
        .unwrap();
        assert_eq!(r.business_types[0].name, "corporation");
    }

    #[test]
    fn test_naics_lookup() {
        let r: NaicsCategoriesResponse = serde_json::from_str(
            r#"{"success":true,"naics_categories":{
                "Accommodation and Food Services":[{"code":721,"subcategory":"Accommodation"},
                                                   {"code":722,"subcategory":"Food Services"}],
                "Retail":[{"code":441,"subcategory":"Motor Vehicle Dealers"}]}}"#,
        )
        .unwrap();
        let (category, sub) = r.find(722).unwrap();
        assert_eq!(category, "Accommodation and Food Services");
        assert_eq!(sub.subcategory, "Food Services");
        assert!(r.find(1).is_none());
    }
}
