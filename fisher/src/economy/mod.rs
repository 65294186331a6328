mod items;
mod shop;

pub use items::use_item;
pub use shop::{
    buy_fish,
    buy_item,
    shop_fish,
};
