//! One setter per Image-Charts query parameter.
//!
//! Semantics of each value are defined by the API; see
//! <https://documentation.image-charts.com/> for the full grammar.

use super::ChartRequest;

macro_rules! chart_params {
    ($( $(#[$doc:meta])* $name:ident ),* $(,)?) => {
        impl ChartRequest {
            $(
                $(#[$doc])*
                pub fn $name(&self, value: impl Into<String>) -> Self {
                    self.param(stringify!($name), value)
                }
            )*
        }

        /// Every parameter with a dedicated setter on [`ChartRequest`], in declaration order.
        pub const PARAMETERS: &[&str] = &[$(stringify!($name)),*];
    };
}

chart_params! {
    /// Chart type: `bvg` grouped bars, `bvs` stacked bars, `lc` line chart, `ls` sparklines,
    /// `p` pie, `gv` GraphViz, `qr` QR code.
    ///
    /// Append `:nda` to a line chart type to hide the default axes.
    cht,
    /// Chart data, e.g. `a:-100,200.5,75.55,110` or `t:10,20,30|15,25,35`.
    chd,
    /// Data scaling: `a` for automatic, or `<min>,<max>` pairs per series.
    chds,
    /// QR code data encoding. `UTF-8` is the only supported value.
    choe,
    /// QR code error correction level and optional margin, e.g. `L|4`.
    chld,
    /// Axis data range, e.g. `0,0,500|1,0,200`.
    chxr,
    /// Output format hint appended to the URL: `.png`, `.svg` or `.gif`.
    ///
    /// Only QR codes and GraphViz support svg.
    chof,
    /// Chart size as `<width>x<height>`, e.g. `400x400`.
    chs,
    /// Legend text, one label per series separated by `|`.
    chdl,
    /// Legend text color and font size, e.g. `9e9e9e,17`.
    chdls,
    /// Solid or dotted grid lines.
    chg,
    /// Series colors.
    chco,
    /// Chart title.
    chtt,
    /// Title color and font size, e.g. `00FF00,17`.
    chts,
    /// Visible axes, e.g. `x,y`.
    chxt,
    /// Custom axis labels, e.g. `0:|Jan|July|Jan`.
    chxl,
    /// Axis label font size and color.
    chxs,
    /// Compound charts and line fills.
    chm,
    /// Line thickness and solid/dashed style.
    chls,
    /// Bar, pie, doughnut and polar slice labels.
    chl,
    /// Position and style of labels on data.
    chlps,
    /// Chart margins.
    chma,
    /// Legend position and entry order.
    chdlp,
    /// Background fills.
    chf,
    /// Bar corner radius.
    chbr,
    /// Gif animation settings, e.g. `1300|easeInOutSine`.
    ///
    /// Setting it makes [`ChartRequest::to_data_uri`] label the image `image/gif`.
    chan,
    /// Doughnut chart inside label.
    chli,
    /// Enterprise account id. Requests are signed when a secret is configured.
    icac,
    /// HMAC-SHA256 request signature, passed through verbatim.
    ///
    /// Normally computed for you; see [`ChartRequest::to_url`].
    ichm,
    /// Default Google Fonts family for all text, e.g. `Abel`.
    icff,
    /// Default font style for all text, e.g. `italic`.
    icfs,
    /// Localization (ISO 639-1).
    iclocale,
    /// Retina mode (`1`).
    icretina,
    /// QR code background color.
    icqrb,
    /// QR code foreground color.
    icqrf,
}
