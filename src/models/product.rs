use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog product as it travels on the wire. `id` is assigned by the store
/// on insert and is absent until then; absent optionals are omitted from
/// JSON rather than rendered as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Document handed to the store. Never carries `_id`; the store assigns
    /// it. Absent optionals are omitted, not stored as null.
    pub fn to_document(&self) -> Document {
        let mut document = doc! {
            "title": &self.title,
            "price": self.price,
            "category": &self.category,
            "in_stock": self.in_stock,
        };
        if let Some(description) = &self.description {
            document.insert("description", description);
        }
        if let Some(image) = &self.image {
            document.insert("image", image);
        }
        document
    }

    /// Maps a stored document to the wire shape. This is the only place the
    /// store's `_id` field is touched: it becomes the plain-text `id` and
    /// the native representation goes no further.
    pub fn from_document(mut document: Document) -> Self {
        let id = document
            .remove("_id")
            .as_ref()
            .and_then(Bson::as_object_id)
            .map(|oid| oid.to_hex());
        Self {
            id,
            title: document.get_str("title").unwrap_or_default().to_string(),
            description: document.get_str("description").ok().map(str::to_string),
            price: number_field(&document, "price"),
            category: document.get_str("category").unwrap_or_default().to_string(),
            in_stock: document.get_bool("in_stock").unwrap_or(true),
            image: document.get_str("image").ok().map(str::to_string),
        }
    }
}

/// Numbers may come back as any BSON numeric type depending on how the
/// document was written.
fn number_field(document: &Document, key: &str) -> f64 {
    match document.get(key) {
        Some(Bson::Double(value)) => *value,
        Some(Bson::Int32(value)) => f64::from(*value),
        Some(Bson::Int64(value)) => *value as f64,
        _ => 0.0,
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Untrusted create-product payload. Every field is optional so validation
/// can report precise field-level issues instead of a serde parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct ProductInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image: Option<String>,
}

#[derive(Debug, PartialEq, Error)]
#[error("invalid product: {}", .issues.join(", "))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

/// Checks presence and type of the required fields and normalizes the
/// optional ones. Collects every issue rather than stopping at the first.
/// Pure; performs no store access.
pub fn validate(input: ProductInput) -> Result<Product, ValidationError> {
    let mut issues = Vec::new();

    let title = required_text(input.title, "title", &mut issues);
    let category = required_text(input.category, "category", &mut issues);
    let price = match input.price {
        Some(price) if price.is_finite() && price >= 0.0 => Some(price),
        Some(_) => {
            issues.push("price must be a non-negative number".to_string());
            None
        }
        None => {
            issues.push("price is required".to_string());
            None
        }
    };

    match (title, category, price) {
        (Some(title), Some(category), Some(price)) => Ok(Product {
            id: None,
            title,
            description: input.description,
            price,
            category,
            in_stock: input.in_stock.unwrap_or(true),
            image: input.image,
        }),
        _ => Err(ValidationError { issues }),
    }
}

fn required_text(
    value: Option<String>,
    field: &str,
    issues: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        Some(_) => {
            issues.push(format!("{field} must be a non-empty string"));
            None
        }
        None => {
            issues.push(format!("{field} is required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    fn minimal_input() -> ProductInput {
        ProductInput {
            title: Some("Classic Tee".to_string()),
            price: Some(29.0),
            category: Some("tops".to_string()),
            ..ProductInput::default()
        }
    }

    // ── validate ───────────────────────────────────────────────────────────────

    #[test]
    fn minimal_input_normalizes_defaults() {
        let product = validate(minimal_input()).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.title, "Classic Tee");
        assert!(product.in_stock, "in_stock must default to true");
        assert_eq!(product.description, None);
        assert_eq!(product.image, None);
    }

    #[test]
    fn explicit_in_stock_false_is_kept() {
        let product = validate(ProductInput {
            in_stock: Some(false),
            ..minimal_input()
        })
        .unwrap();
        assert!(!product.in_stock);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = validate(ProductInput {
            title: None,
            ..minimal_input()
        })
        .unwrap_err();
        assert_eq!(err.issues, vec!["title is required"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = validate(ProductInput {
            title: Some("   ".to_string()),
            ..minimal_input()
        })
        .unwrap_err();
        assert_eq!(err.issues, vec!["title must be a non-empty string"]);
    }

    #[test]
    fn missing_category_is_rejected() {
        let err = validate(ProductInput {
            category: None,
            ..minimal_input()
        })
        .unwrap_err();
        assert_eq!(err.issues, vec!["category is required"]);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = validate(ProductInput {
            price: Some(-1.0),
            ..minimal_input()
        })
        .unwrap_err();
        assert_eq!(err.issues, vec!["price must be a non-negative number"]);
    }

    #[test]
    fn nan_price_is_rejected() {
        let err = validate(ProductInput {
            price: Some(f64::NAN),
            ..minimal_input()
        })
        .unwrap_err();
        assert_eq!(err.issues, vec!["price must be a non-negative number"]);
    }

    #[test]
    fn zero_price_is_allowed() {
        let product = validate(ProductInput {
            price: Some(0.0),
            ..minimal_input()
        })
        .unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn all_issues_are_collected() {
        let err = validate(ProductInput::default()).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                "title is required",
                "category is required",
                "price is required",
            ]
        );
    }

    // ── document mapping ───────────────────────────────────────────────────────

    #[test]
    fn to_document_omits_absent_optionals_and_id() {
        let document = validate(minimal_input()).unwrap().to_document();
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("description"));
        assert!(!document.contains_key("image"));
        assert_eq!(document.get_str("title").unwrap(), "Classic Tee");
        assert_eq!(document.get_bool("in_stock").unwrap(), true);
    }

    #[test]
    fn from_document_converts_object_id_to_text() {
        let oid = ObjectId::new();
        let mut document = validate(minimal_input()).unwrap().to_document();
        document.insert("_id", oid);

        let product = Product::from_document(document);
        assert_eq!(product.id.as_deref(), Some(oid.to_hex().as_str()));
    }

    #[test]
    fn serialized_product_never_exposes_raw_id_field() {
        let oid = ObjectId::new();
        let mut document = validate(minimal_input()).unwrap().to_document();
        document.insert("_id", oid);

        let json = serde_json::to_value(Product::from_document(document)).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["id"], serde_json::json!(oid.to_hex()));
        assert!(json.get("description").is_none(), "absent fields stay absent");
    }

    #[test]
    fn from_document_tolerates_integer_prices() {
        let document = doc! {
            "title": "Imported",
            "price": 12_i32,
            "category": "misc",
            "in_stock": true,
        };
        assert_eq!(Product::from_document(document).price, 12.0);
    }
}
