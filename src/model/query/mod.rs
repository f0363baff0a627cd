pub use create::Create;
pub use delete::Delete;
pub use expr::{BinaryOp, Expr};
pub use insert::Insert;
pub use select::{ResultColumn, Select, SelectTable};

pub mod create;
pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
