//! 数据模型
//!
//! 表结构由外部数据库拥有，这里只定义本层读写到的行结构与取值集合。

pub mod abnormal_event;
pub mod driver;
pub mod fleet;
pub mod order;
pub mod vehicle;
