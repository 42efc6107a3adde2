mod device;
mod service;
mod subscription;
mod validate;

pub use device::{Attribute, Command, CommandType, Device, DeviceBuilder, Transport};
pub use service::{IotService, IotServiceBuilder};
pub use subscription::{
    EntityRef, Notification, NotificationHttp, Subject, Subscription, SubscriptionBuilder,
};
pub use validate::ValidationError;
