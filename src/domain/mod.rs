//! Доменная модель игры "старшая карта": карты, раунды, сессия.

pub mod card;
pub mod round;
pub mod session;

/// Поколение (эпоха) сессии. Каждая новая сессия получает новое значение.
pub type Epoch = u64;

pub use card::*;
pub use round::*;
pub use session::*;
