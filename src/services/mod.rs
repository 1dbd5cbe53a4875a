pub mod devices;

pub use devices::DeviceService;
