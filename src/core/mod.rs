pub mod order;
pub mod view;

pub use crate::domain::model::{DecodedOrder, ListResponse, MenuEntry, ReservationEntry};
pub use crate::domain::ports::{ConfigProvider, RestoApi};
pub use crate::utils::error::Result;
