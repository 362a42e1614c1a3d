use image_charts::ImageCharts;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let image = ImageCharts::default()
        .chart()
        .cht("bvg") // vertical bar chart
        .chs("300x300") // 300px x 300px
        .chd("a:60,40") // 2 data points: 60 and 40
        .fetch()?;

    println!(
        "{} bytes of {}",
        image.bytes().len(),
        image.content_type().unwrap_or("unknown content type")
    );
    Ok(())
}
