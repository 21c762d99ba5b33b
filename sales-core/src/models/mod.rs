mod device;
mod payment;
mod revenue_class;
mod selection;

pub use device::Device;
pub use payment::PaymentQuote;
pub use revenue_class::RevenueClass;
pub use selection::DeviceSelection;
