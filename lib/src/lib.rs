mod error;
pub use self::error::Error;

mod packet;
pub use self::packet::{MagicPacket, parse_mac};

mod target;
pub use self::target::{Port, Target, resolve_addr};

mod socket;
pub use self::socket::WakeSocket;

mod wake;
pub use self::wake::send_magic;
