pub mod device;

pub use device::{DeviceDataResponse, DeviceInfo, DeviceReading, EnergySeries};
