pub mod validation;

pub use validation::{
    is_blank, validate_identity_name, validate_image_extension, validate_recipe_fields,
    ACCEPTED_IMAGE_EXTENSIONS,
};
