pub mod dates;
pub mod markup;
