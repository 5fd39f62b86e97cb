/// Define a configuration struct with embedded defaults
///
/// Each field is declared with its type and default in one place. The macro
/// generates the struct with public fields, a `Default` impl using those
/// values, and serde support with `#[serde(default)]` so partial TOML files
/// fill the gaps from the defaults.
///
/// ```rust,ignore
/// config_struct! {
///     pub struct DirectoryConfig {
///         default_limit: usize = 10,
///         strict_sort: bool = false,
///     }
/// }
/// ```
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
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
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
