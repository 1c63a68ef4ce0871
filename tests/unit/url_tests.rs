// URL signing unit tests
// Every digest here is pinned against the server-side verifier

use pixlane::{Client, ClientConfig, Params, UrlOptions};

const DEMO_IMAGE_PATH: &str = "/images/demo.png";

fn client() -> Client {
    let config = ClientConfig {
        host: Some("demo.pixlane.net".to_string()),
        secure_url_token: Some("10adc394".to_string()),
        include_library_param: false,
        ..Default::default()
    };
    Client::new(config).unwrap()
}

#[test]
fn test_signing_with_no_params() {
    let path = client().path(DEMO_IMAGE_PATH);
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?s=2c7c157eaf23b06a0deb2f60b81938c4"
    );
}

#[test]
fn test_signing_with_one_param() {
    let path = client().path(DEMO_IMAGE_PATH);
    let overrides = Params::from_pairs(&[("w", "200")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/images/demo.png?w=200&s=da421114ca238d1f4a927b889f67c34e"
    );
}

#[test]
fn test_signing_with_multiple_params() {
    let path = client().path(DEMO_IMAGE_PATH);
    let overrides = Params::from_pairs(&[("h", "200"), ("w", "200")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/images/demo.png?h=200&w=200&s=d570a1ecd765470f7b34a69b56718a7a"
    );
}

#[test]
fn test_signing_with_empty_value_param() {
    let path = client().path(DEMO_IMAGE_PATH);
    let overrides = Params::from_pairs(&[("mark", "")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/images/demo.png?mark&s=6ca2720a15de7ec9862650cca69ad96d"
    );
}

#[test]
fn test_signing_with_multiple_params_and_empty_value_param() {
    let path = client().path(DEMO_IMAGE_PATH);
    let overrides = Params::from_pairs(&[("mark", ""), ("h", "200"), ("w", "200")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/images/demo.png?mark&h=200&w=200&s=70e6fd73fad79125c3596c0575a6e4cf"
    );
}

#[test]
fn test_calling_to_url_many_times() {
    let path = client().path(DEMO_IMAGE_PATH);
    let overrides = Params::from_pairs(&[("h", "200"), ("w", "200")]);
    let expected =
        "https://demo.pixlane.net/images/demo.png?h=200&w=200&s=d570a1ecd765470f7b34a69b56718a7a";

    for _ in 0..11 {
        assert_eq!(path.to_url_with(&overrides, &UrlOptions::default()), expected);
    }
}

#[test]
fn test_insertion_order_survives_reset_and_remerge() {
    let mut path = client().path(DEMO_IMAGE_PATH);
    path.set("h", 200).set("w", 200);
    let signed = path.to_url();

    path.defaults().set("h", 200).set("w", 200);
    assert_eq!(path.to_url(), signed);
    assert!(path.to_url().contains("?h=200&w=200&"));
}
