//! Helper macro for port error enums.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor whose
//! fields accept `impl Into<T>`, so adapters can write
//! `InvoiceRepositoryError::query("boom")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Timeout => "timed out",
            Rejected { reason: String } => "rejected: {reason}",
            Limited { reason: String, retry_after: u32 } => "limited: {reason} ({retry_after}s)",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::timeout(), SamplePortError::Timeout);
        assert_eq!(SamplePortError::timeout().to_string(), "timed out");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::rejected("closed");
        assert_eq!(err.to_string(), "rejected: closed");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::limited("busy", 30_u32);
        assert_eq!(err.to_string(), "limited: busy (30s)");
    }
}
