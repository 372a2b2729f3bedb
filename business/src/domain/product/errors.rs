#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.title_too_short")]
    TitleTooShort,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.description_too_short")]
    DescriptionTooShort,
    #[error("product.image_empty")]
    ImageEmpty,
    #[error("product.image_invalid_url")]
    ImageInvalidUrl,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("product.load_failed")]
    LoadFailed,
    #[error(transparent)]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
