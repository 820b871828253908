/// CRUD interface over resource collections
pub mod resource;
