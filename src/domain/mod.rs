pub mod credential;
pub mod draft;
pub mod work_item;
