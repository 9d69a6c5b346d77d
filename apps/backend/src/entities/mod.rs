pub mod greetings;

pub use greetings::Entity as Greetings;
pub use greetings::Model as Greeting;
