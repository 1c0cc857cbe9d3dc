pub mod devrev;
