//! Typed forms of the enumerated columns.
//!
//! The schema stores roles, statuses and payment modes as lowercase strings so that rows
//! written by earlier deployments stay readable. These enums are the only place the string
//! values are spelled out, everything else goes through [`as_str`](UserRole::as_str) and
//! [`FromStr`].

use std::{fmt, str::FromStr};

use crate::server::error::validation::ValidationError;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(ValidationError::invalid(
                        $field,
                        format!("unknown value {:?}", other),
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Account role, fixed at creation
    UserRole, "role" {
        User => "user",
        Owner => "owner",
        Admin => "admin",
    }
);

string_enum!(
    /// Moderation state of a turf
    TurfStatus, "status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
);

string_enum!(
    BookingStatus, "status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
    }
);

string_enum!(
    /// How the organiser pays for a booking
    ///
    /// Only `Split` collects an advance, every other mode is paid in full up front.
    PaymentMode, "type" {
        Online => "online",
        Offline => "offline",
        Split => "split",
    }
);

string_enum!(
    FriendStatus, "status" {
        Pending => "pending",
        Accepted => "accepted",
    }
);
