use std::time::Duration;

use image_charts::{IcError, ImageCharts};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ImageCharts::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let bars = client
        .chart()
        .cht("bvg") // vertical bar chart
        .chs("300x300") // 300px x 300px
        .chd("a:60,40"); // 2 data points: 60 and 40

    println!("{}", bars.to_url());

    match bars.to_data_uri() {
        Ok(uri) => println!("{}...", &uri[..uri.len().min(60)]),
        Err(IcError::Validation { message, .. }) => eprintln!("invalid chart: {message}"),
        Err(e) => return Err(e.into()),
    }

    // `chan` turns the same chart into an animated gif.
    let animated = bars.chan("1200").to_data_uri()?;
    println!("{}...", &animated[..animated.len().min(60)]);

    Ok(())
}
