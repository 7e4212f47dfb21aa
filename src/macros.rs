macro_rules! impl_to_perf_string_on_to_string {
    ($($t:ty), *) => {
        $(
            impl ToPerfString for $t {
                fn to_perf_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

/// Lets you build [`Params`](crate::Params) from `metric => (warning, critical)` pairs. It's a bit
/// like the vec! macro.
/// ```rust
/// # #[macro_use]
/// # extern crate mikrotik_traffic;
/// #
/// # use mikrotik_traffic::{Levels, MetricName};
/// #
/// # fn main() {
/// let params = params![
///     MetricName::CurrentTx => (10_000_000, 20_000_000),
///     MetricName::TotalRx => (1, 2)
/// ];
/// assert_eq!(params.levels(MetricName::TotalRx), Some(&Levels::new(1, 2)));
/// # }
/// ```
#[macro_export]
macro_rules! params {
    ($( $metric:expr => ($warning:expr, $critical:expr) ), *) => {
        {
            use $crate::{Levels, Params};
            let mut p = Params::new();
            $(
                p.set_levels($metric, Some(Levels::new($warning, $critical)));
            )*
            p
        }
    };
}

/// `name=field;field;...` with trailing empty fields dropped.
macro_rules! perf_string {
    ($name:expr, $( $field:expr ), *) => {
        {
            let mut s = String::new();
            s.push_str(&format!("{}=", $name));
            $(
                s.push_str(&$field.to_perf_string());
                s.push(';');
            )*
            s.trim_end_matches(';').to_string()
        }
    };
}
