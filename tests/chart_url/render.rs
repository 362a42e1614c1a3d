use image_charts::{ChartRequest, ImageCharts, PARAMETERS};

#[test]
fn to_url_renders_default_endpoint() {
    let url = ChartRequest::default().cht("p").chd("t:1,2,3").to_url();
    assert_eq!(url, "https://image-charts.com:443/chart?cht=p&chd=t%3A1%2C2%2C3");
}

#[test]
fn empty_chart_renders_bare_query() {
    assert_eq!(
        ImageCharts::default().chart().to_url(),
        "https://image-charts.com:443/chart?"
    );
}

#[test]
fn custom_endpoint_is_used() {
    let client = ImageCharts::builder()
        .protocol("http")
        .host("on-premise-image-charts.com")
        .port(8080)
        .pathname("/v2/chart")
        .build()
        .unwrap();

    assert_eq!(
        client.chart().cht("p").to_url(),
        "http://on-premise-image-charts.com:8080/v2/chart?cht=p"
    );
}

#[test]
fn every_setter_is_forwarded_under_its_own_name() {
    let chart = ChartRequest::default()
        .cht("plop")
        .chd("plop")
        .chds("plop")
        .choe("plop")
        .chld("plop")
        .chxr("plop")
        .chof("plop")
        .chs("plop")
        .chdl("plop")
        .chdls("plop")
        .chg("plop")
        .chco("plop")
        .chtt("plop")
        .chts("plop")
        .chxt("plop")
        .chxl("plop")
        .chxs("plop")
        .chm("plop")
        .chls("plop")
        .chl("plop")
        .chlps("plop")
        .chma("plop")
        .chdlp("plop")
        .chf("plop")
        .chbr("plop")
        .chan("plop")
        .chli("plop")
        .icac("plop")
        .ichm("plop")
        .icff("plop")
        .icfs("plop")
        .iclocale("plop")
        .icretina("plop")
        .icqrb("plop")
        .icqrf("plop");

    assert_eq!(PARAMETERS.len(), 35);

    let expected = PARAMETERS
        .iter()
        .map(|p| format!("{p}=plop"))
        .collect::<Vec<_>>()
        .join("&");

    // no secret configured, so `icac` does not trigger signing
    assert_eq!(
        chart.to_url(),
        format!("https://image-charts.com:443/chart?{expected}")
    );
}

#[test]
fn last_value_wins_and_keeps_first_position() {
    let chart = ChartRequest::default()
        .cht("p")
        .chs("100x100")
        .cht("bvg")
        .chd("a:1")
        .chs("200x200");

    assert_eq!(chart.query_string(), "cht=bvg&chs=200x200&chd=a%3A1");
    assert_eq!(chart.query().len(), 3);
    assert_eq!(chart.get("chs"), Some("200x200"));
    assert_eq!(chart.get("chtt"), None);
}

#[test]
fn values_are_form_urlencoded() {
    let chart = ChartRequest::default()
        .chtt("My beautiful chart")
        .chl("a|b")
        .chli("95K€")
        .chxs("1N*cUSD*Mil,FF0000");

    assert_eq!(
        chart.query_string(),
        "chtt=My+beautiful+chart&chl=a%7Cb&chli=95K%E2%82%AC&chxs=1N*cUSD*Mil%2CFF0000"
    );
}

#[test]
fn generic_param_matches_named_setter() {
    let named = ChartRequest::default().chs("300x300").to_url();
    let generic = ChartRequest::default().param("chs", "300x300").to_url();
    assert_eq!(named, generic);
}
