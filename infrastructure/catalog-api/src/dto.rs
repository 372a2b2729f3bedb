use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;

/// Product record as served by the remote catalog.
#[derive(Debug, Deserialize)]
pub struct RemoteProduct {
    pub id: Value,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl RemoteProduct {
    pub fn into_product(self) -> Result<Product, GatewayError> {
        Ok(Product::from_remote(
            coerce_id(&self.id)?,
            self.title,
            self.price,
            self.description,
            self.image,
            self.category,
        ))
    }
}

/// Body returned by the service after creating a product.
#[derive(Debug, Deserialize)]
pub struct CreatedProduct {
    pub id: Value,
}

/// Outgoing product body. The like flag is client-only and never sent.
#[derive(Debug, Serialize)]
pub struct ProductPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub title: &'a str,
    pub price: f64,
    pub description: &'a str,
    pub image: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a ProductDraft> for ProductPayload<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            id: None,
            title: &draft.title,
            price: draft.price,
            description: &draft.description,
            image: &draft.image,
            category: &draft.category,
        }
    }
}

impl<'a> From<&'a Product> for ProductPayload<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: Some(product.id.as_str()),
            title: &product.title,
            price: product.price,
            description: &product.description,
            image: &product.image,
            category: &product.category,
        }
    }
}

/// Ids arrive as JSON numbers or strings; both become the id's text form.
pub fn coerce_id(raw: &Value) -> Result<ProductId, GatewayError> {
    match raw {
        Value::String(s) => Ok(ProductId::new(s.as_str())),
        Value::Number(n) => match n.as_u64() {
            Some(whole) => Ok(ProductId::from(whole)),
            None => Ok(ProductId::new(n.to_string())),
        },
        _ => Err(GatewayError::invalid_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_coerce_numeric_and_string_ids() {
        assert_eq!(coerce_id(&json!(21)).unwrap().as_str(), "21");
        assert_eq!(coerce_id(&json!("abc")).unwrap().as_str(), "abc");
        assert_eq!(coerce_id(&json!(null)), Err(GatewayError::InvalidResponse));
    }

    #[test]
    fn should_decode_remote_product_as_unliked() {
        let remote: RemoteProduct = serde_json::from_value(json!({
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }))
        .unwrap();

        let product = remote.into_product().unwrap();

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category, "men's clothing");
        assert!(!product.is_liked);
    }

    #[test]
    fn should_omit_like_flag_and_id_from_create_payload() {
        let draft = ProductDraft {
            title: "T".to_string(),
            price: 13.5,
            description: "lorem ipsum set".to_string(),
            image: "https://i.pravatar.cc".to_string(),
            category: "electronic".to_string(),
        };

        let body = serde_json::to_value(ProductPayload::from(&draft)).unwrap();

        assert_eq!(
            body,
            json!({
                "title": "T",
                "price": 13.5,
                "description": "lorem ipsum set",
                "image": "https://i.pravatar.cc",
                "category": "electronic"
            })
        );
    }
}
