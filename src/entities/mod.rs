mod booking;
mod category;
mod money;
mod quote;
mod tariff;

pub use booking::{Booking, CancellationPolicy, CancellationQuote};
pub use category::VehicleCategory;
pub use money::round2;
pub use quote::{PriceList, Quote};
pub use tariff::TariffTable;
