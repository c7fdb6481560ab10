//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields. The macro derives the `thiserror`
//! plumbing and adds one snake_case constructor per variant whose parameters
//! accept anything convertible into the field types, so adapters can write
//! `RestaurantSourceError::timeout("status 504")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),+ },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    /// Build this variant from convertible field values.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor and message coverage for the source port error.

    use rstest::rstest;

    use crate::domain::ports::RestaurantSourceError;

    #[rstest]
    #[case(
        RestaurantSourceError::transport("connection reset"),
        "restaurant source transport failed: connection reset"
    )]
    #[case(
        RestaurantSourceError::timeout(String::from("status 504")),
        "restaurant source timeout: status 504"
    )]
    #[case(
        RestaurantSourceError::rate_limited("status 429"),
        "restaurant source rate limited request: status 429"
    )]
    #[case(
        RestaurantSourceError::decode("expected value at line 1"),
        "restaurant source response decode failed: expected value at line 1"
    )]
    #[case(
        RestaurantSourceError::invalid_request("status 400: bad query"),
        "restaurant source rejected request: status 400: bad query"
    )]
    fn constructors_render_their_messages(
        #[case] error: RestaurantSourceError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn constructors_fill_the_named_field() {
        assert_eq!(
            RestaurantSourceError::timeout("slow"),
            RestaurantSourceError::Timeout {
                message: "slow".to_owned()
            }
        );
    }

    #[rstest]
    #[case(RestaurantSourceError::transport("reset"), true)]
    #[case(RestaurantSourceError::timeout("slow"), true)]
    #[case(RestaurantSourceError::rate_limited("busy"), true)]
    #[case(RestaurantSourceError::decode("html"), false)]
    #[case(RestaurantSourceError::invalid_request("bad"), false)]
    fn only_transient_failures_are_retryable(
        #[case] error: RestaurantSourceError,
        #[case] retryable: bool,
    ) {
        assert_eq!(error.is_retryable(), retryable);
    }
}
