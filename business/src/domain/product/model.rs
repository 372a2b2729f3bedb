use super::errors::ProductError;
use super::value_objects::ProductId;

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;
const IMAGE_URL_PATTERN: &str = r"^https?://.+\..+";

/// A catalog entry. `is_liked` only ever lives on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub is_liked: bool,
}

/// Product fields as submitted for creation, before the service assigns an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl Product {
    /// Constructor for records received from the remote service (never liked).
    pub fn from_remote(
        id: ProductId,
        title: String,
        price: f64,
        description: String,
        image: String,
        category: String,
    ) -> Self {
        Self {
            id,
            title,
            price,
            description,
            image,
            category,
            is_liked: false,
        }
    }

    /// Combines a server-assigned id with locally submitted fields.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self::from_remote(
            id,
            draft.title,
            draft.price,
            draft.description,
            draft.image,
            draft.category,
        )
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        self.draft().validate()
    }
}

impl ProductDraft {
    /// Form rules, checked in field order; the first violation wins.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }
        if self.title.chars().count() < MIN_TITLE_CHARS {
            return Err(ProductError::TitleTooShort);
        }

        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(ProductError::PriceNotPositive);
        }

        if self.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ProductError::DescriptionTooShort);
        }

        if self.image.trim().is_empty() {
            return Err(ProductError::ImageEmpty);
        }
        let valid_url = regex::Regex::new(IMAGE_URL_PATTERN)
            .map(|re| re.is_match(&self.image))
            .unwrap_or(false);
        if !valid_url {
            return Err(ProductError::ImageInvalidUrl);
        }

        if self.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        Ok(())
    }
}
