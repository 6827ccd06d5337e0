/// Configuration macros
///
/// `config_struct!` defines a configuration section with its defaults in a
/// single declaration.

/// Define a configuration struct with embedded defaults
///
/// ```rust,ignore
/// config_struct! {
///     pub struct SellerConfig {
///         skip_preflight: bool = true,
///         delay_between_sells_ms: u64 = 0,
///     }
/// }
/// ```
///
/// Generates the struct with public fields, a `Default` impl using the given
/// values and serde support with `#[serde(default)]`, so a partial TOML file
/// only overrides what it names.
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
