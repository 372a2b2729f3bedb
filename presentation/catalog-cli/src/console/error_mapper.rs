use business::domain::errors::GatewayError;
use business::domain::product::errors::ProductError;

/// Maps domain error codes to the messages shown inline in the console.
pub fn user_message(error: &ProductError) -> String {
    let message = match error {
        ProductError::TitleEmpty => "Title is required",
        ProductError::TitleTooShort => "Title must be at least 3 characters",
        ProductError::PriceNotPositive => "Price must be a positive number",
        ProductError::DescriptionEmpty => "Description is required",
        ProductError::DescriptionTooShort => "Description must be at least 10 characters",
        ProductError::ImageEmpty => "Image link is required",
        ProductError::ImageInvalidUrl => "Enter a valid image link (http or https)",
        ProductError::CategoryEmpty => "Category is required",
        ProductError::NotFound => "Product not found",
        ProductError::LoadFailed => "Failed to load products. Please try again.",
        ProductError::Gateway(GatewayError::UnexpectedStatus(status)) => {
            return format!("The catalog service rejected the request (HTTP {})", status);
        }
        ProductError::Gateway(GatewayError::RequestFailed) => {
            "Could not reach the catalog service"
        }
        ProductError::Gateway(GatewayError::InvalidResponse) => {
            "The catalog service sent an unexpected response"
        }
    };
    message.to_string()
}
