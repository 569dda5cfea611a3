//! Product records.
//!
//! Products mirror the user shapes (candidate, validated, persisted, patch)
//! but carry no uniqueness constraint beyond the store identifier.

use serde::{Deserialize, Serialize};

use super::ProductId;
use super::presence::{MissingFieldsError, Presence, missing_fields};

/// Product submitted for creation, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<f64>,
}

impl ProductCandidate {
    /// Convenience constructor for fully populated candidates.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>, stock: impl Into<f64>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category: Some(category.into()),
            stock: Some(stock.into()),
        }
    }
}

/// Product that satisfies the presence rule and may be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: f64,
    category: String,
    stock: f64,
}

impl NewProduct {
    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Units in stock; any JSON number is accepted.
    pub fn stock(&self) -> f64 {
        self.stock
    }

    /// Attach a store-assigned identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        let Self {
            name,
            price,
            category,
            stock,
        } = self;
        Product {
            id,
            name,
            price,
            category,
            stock,
        }
    }
}

impl TryFrom<ProductCandidate> for NewProduct {
    type Error = MissingFieldsError;

    fn try_from(value: ProductCandidate) -> Result<Self, Self::Error> {
        let missing = missing_fields([
            ("name", value.name.is_present()),
            ("price", value.price.is_present()),
            ("category", value.category.is_present()),
            ("stock", value.stock.is_present()),
        ]);
        let ProductCandidate {
            name: Some(name),
            price: Some(price),
            category: Some(category),
            stock: Some(stock),
        } = value
        else {
            return Err(MissingFieldsError { fields: missing });
        };
        MissingFieldsError::check(missing)?;
        Ok(Self {
            name,
            price,
            category,
            stock,
        })
    }
}

/// Persisted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: f64,
}

impl Product {
    /// Apply a partial update in place; absent fields are left untouched.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category.clone_from(category);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

/// Partial update payload for `PATCH /products/{productId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<f64>,
}

impl ProductPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none() && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProductCandidate::new("Lamp", 0.0, "home", 3), vec!["price"])]
    #[case(ProductCandidate::new("Lamp", 19.5, "", 0), vec!["category", "stock"])]
    #[case(ProductCandidate::default(), vec!["name", "price", "category", "stock"])]
    fn candidates_missing_fields_are_rejected(
        #[case] candidate: ProductCandidate,
        #[case] expected: Vec<&'static str>,
    ) {
        let err = NewProduct::try_from(candidate).expect_err("incomplete candidate");
        assert_eq!(err.fields, expected);
    }

    #[rstest]
    fn complete_candidate_is_accepted() {
        let product = NewProduct::try_from(ProductCandidate::new("Lamp", 19.5, "home", 3))
            .expect("complete candidate");
        assert_eq!(product.category(), "home");
        assert_eq!(product.stock(), 3.0);
    }

    #[rstest]
    fn apply_merges_supplied_fields() {
        let mut product = NewProduct::try_from(ProductCandidate::new("Lamp", 19.5, "home", 3))
            .expect("valid")
            .into_product(ProductId::random());
        product.apply(&ProductPatch {
            stock: Some(0.0),
            ..ProductPatch::default()
        });
        assert_eq!(product.stock, 0.0);
        assert_eq!(product.name, "Lamp");
    }

    #[rstest]
    #[case(r#"{"name":"Lamp","price":19.5,"category":"home","stock":3}"#, 3.0)]
    #[case(r#"{"name":"Lamp","price":19.5,"category":"home","stock":2.5}"#, 2.5)]
    fn stock_accepts_any_json_number(#[case] body: &str, #[case] expected: f64) {
        let candidate: ProductCandidate = serde_json::from_str(body).expect("candidate decodes");
        let product = NewProduct::try_from(candidate).expect("complete candidate");
        assert_eq!(product.stock(), expected);
    }
}
