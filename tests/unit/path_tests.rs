// Path building and encoding unit tests
// Mirrors the behavior the rendering service's verifier expects bit-exactly

use pixlane::{Client, ClientConfig, Error, Params, UrlOptions, VERSION};

fn client() -> Client {
    let config = ClientConfig {
        host: Some("demo.pixlane.net".to_string()),
        secure_url_token: Some("10adc394".to_string()),
        include_library_param: false,
        ..Default::default()
    };
    Client::new(config).unwrap()
}

fn unsigned_client() -> Client {
    let config = ClientConfig {
        host: Some("demo.pixlane.net".to_string()),
        include_library_param: false,
        ..Default::default()
    };
    Client::new(config).unwrap()
}

#[test]
fn test_creating_a_path() {
    let path = client().path("/images/demo.png");
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?s=2c7c157eaf23b06a0deb2f60b81938c4"
    );

    // a missing leading slash is normalized away
    let path = client().path("images/demo.png");
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?s=2c7c157eaf23b06a0deb2f60b81938c4"
    );
}

#[test]
fn test_disable_path_encoding() {
    let path = client().path("[images]/demo.png");
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/%5Bimages%5D/demo.png?s=270832685733a36ba02bd8ab9fd72df5"
    );

    let options = UrlOptions {
        disable_path_encoding: true,
    };
    assert_eq!(
        path.to_url_with(&Params::new(), &options),
        "https://demo.pixlane.net/[images]/demo.png?s=ed6eb07e9eff3f6c8bbcc83fc4f63198"
    );
}

#[test]
fn test_signing_path_with_param() {
    let mut path = client().path("/images/demo.png");
    path.set("w", 200);
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?w=200&s=da421114ca238d1f4a927b889f67c34e"
    );
}

#[test]
fn test_resetting_defaults() {
    let mut path = client().path("/images/demo.png");
    path.set("h", 480);
    path.defaults().set("width", 200);
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?w=200&s=da421114ca238d1f4a927b889f67c34e"
    );
}

#[test]
fn test_aliases_w_and_width() {
    let expected = "https://demo.pixlane.net/image.png?w=720";

    let mut by_wire_name = unsigned_client().path("image.png");
    by_wire_name.set("w", 720);
    let mut by_alias = unsigned_client().path("image.png");
    by_alias.set("width", 720);

    assert_eq!(by_wire_name.to_url(), expected);
    assert_eq!(by_alias.to_url(), expected);
}

#[test]
fn test_aliases_mark_watermark() {
    let expected = "https://static.pixlane.net/lorie.png?\
                    h=480&w=320&mark64=aHR0cHM6Ly9hc3NldHMucGl4bGFuZS5uZXQvcHJlc3NraXQvcGl4bGFu\
                    ZS1wcmVzc2tpdC5wZGY_cGFnZT00JmZtPXBuZw";

    let mark_img_url = "https://assets.pixlane.net/presskit/pixlane-presskit.pdf?page=4&fm=png";

    let config = ClientConfig {
        host: Some("static.pixlane.net".to_string()),
        include_library_param: false,
        ..Default::default()
    };
    let client = Client::new(config).unwrap();

    let mut path = client.path("lorie.png");
    path.set("h", 480).set("w", 320).set("mark64", mark_img_url);
    assert_eq!(path.to_url(), expected);
}

#[test]
fn test_path_with_multiple_params() {
    let mut path = client().path("/images/demo.png");
    path.set("h", 200).set("w", 200);
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?h=200&w=200&s=d570a1ecd765470f7b34a69b56718a7a"
    );
}

#[test]
fn test_file_path_with_reserved_delimiters() {
    let cases = [
        (
            "/ <>[]{}|\\^%.jpg",
            "https://demo.pixlane.net/%20%3C%3E%5B%5D%7B%7D%7C%5C%5E%25.jpg?h=200&w=200&s=1731846fd046c84270d052b1152b0cfa",
        ),
        (
            "&$+,:;=?@#.jpg",
            "https://demo.pixlane.net/%26%24%2B%2C%3A%3B%3D%3F%40%23.jpg?h=200&w=200&s=08730633f350ceb3cc6bce4caa4be55a",
        ),
    ];

    for (raw_path, expected) in cases {
        let mut path = client().path(raw_path);
        path.set("h", 200).set("w", 200);
        assert_eq!(path.to_url(), expected, "URL encoded incorrectly: {}", raw_path);
    }
}

#[test]
fn test_path_with_multi_value_param_safely_encoded() {
    let mut path = client().path("/images/demo.png");
    path.set_list("markalign", &["middle", "center"]);
    assert_eq!(
        path.to_url(),
        "https://demo.pixlane.net/images/demo.png?markalign=middle%2Ccenter&s=f0d0e28a739f022638f4ba6dddf9b694"
    );
}

#[test]
fn test_param_keys_are_escaped() {
    let path = unsigned_client().path("demo.png");
    let overrides = Params::from_pairs(&[("hello world", "interesting")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/demo.png?hello%20world=interesting"
    );
}

#[test]
fn test_param_values_are_escaped() {
    let path = unsigned_client().path("demo.png");
    let overrides =
        Params::from_pairs(&[("hello_world", "/foo\"> <script>alert(\"hacked\")</script><")]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/demo.png?hello_world=%2Ffoo%22%3E%20%3Cscript%3Ealert%28%22hacked%22%29%3C%2Fscript%3E%3C"
    );
}

#[test]
fn test_unicode_path_variants_are_utf8_encoded() {
    let cases = [
        (
            "I cann\u{f8}t bel\u{ee}\u{e9}v\u{2211} it wor\u{f8ff}s! \u{1f631}",
            "https://demo.pixlane.net/I%20cann%C3%B8t%20bel%C3%AE%C3%A9v%E2%88%91%20it%20wor%EF%A3%BFs%21%20%F0%9F%98%B1",
        ),
        (
            "\u{633}\u{627}\u{646}\u{62f}\u{648}\u{6cc}\u{686}.jpg",
            "https://demo.pixlane.net/%D8%B3%D8%A7%D9%86%D8%AF%D9%88%DB%8C%DA%86.jpg",
        ),
    ];

    for (raw_path, expected) in cases {
        assert_eq!(
            unsigned_client().path(raw_path).to_url(),
            expected,
            "URL encoded incorrectly: {}",
            raw_path
        );
    }
}

#[test]
fn test_base64_param_variants_are_base64_encoded() {
    let path = unsigned_client().path("~text");
    let overrides = Params::from_pairs(&[(
        "txt64",
        "I cann\u{f8}t bel\u{ee}\u{e9}v\u{2211} it wor\u{f8ff}s! \u{1f631}",
    )]);
    assert_eq!(
        path.to_url_with(&overrides, &UrlOptions::default()),
        "https://demo.pixlane.net/~text?txt64=SSBjYW5uw7h0IGJlbMOuw6l24oiRIGl0IHdvcu-jv3MhIPCfmLE"
    );
}

#[test]
fn test_host_is_required() {
    let result = Client::new(ClientConfig::default());
    assert!(matches!(result, Err(Error::MissingHost)));
}

#[test]
fn test_token_is_optional() {
    let path = unsigned_client().path("/images/demo.png");
    assert_eq!(path.to_url(), "https://demo.pixlane.net/images/demo.png");
}

#[test]
fn test_https_is_optional() {
    let config = ClientConfig {
        host: Some("demo.pixlane.net".to_string()),
        use_https: false,
        include_library_param: false,
        ..Default::default()
    };
    let client = Client::new(config).unwrap();
    assert_eq!(
        client.path("/images/demo.png").to_url(),
        "http://demo.pixlane.net/images/demo.png"
    );
}

#[test]
fn test_full_url_is_proxied_as_one_component() {
    let path = "https://google.com/cats.gif";
    assert_eq!(
        client().path(path).to_url(),
        "https://demo.pixlane.net/https%3A%2F%2Fgoogle.com%2Fcats.gif?s=e686099fbba86fc2b8141d3c1ff60605"
    );
}

#[test]
fn test_full_url_with_a_space() {
    let path = "https://my-demo-site.com/files/133467012/avatar icon.png";
    assert_eq!(
        client().path(path).to_url(),
        "https://demo.pixlane.net/https%3A%2F%2Fmy-demo-site.com%2Ffiles%2F133467012%2Favatar%20icon.png?s=0698b87ab279364977e93f0e6baee41b"
    );
}

#[test]
fn test_include_library_param() {
    // enabled by default
    let client = Client::new(ClientConfig::new("demo.pixlane.net")).unwrap();
    let url = client.path("/images/demo.png").to_url();
    assert_eq!(
        url,
        format!("https://demo.pixlane.net/images/demo.png?ixlib=rust-{}", VERSION)
    );
}

#[test]
fn test_configure_library_param() {
    let config = ClientConfig {
        host: Some("demo.pixlane.net".to_string()),
        library_param: "axum".to_string(),
        ..Default::default()
    };
    let client = Client::new(config).unwrap();
    let url = client.path("/images/demo.png").to_url();
    assert_eq!(
        url,
        format!("https://demo.pixlane.net/images/demo.png?ixlib=axum-{}", VERSION)
    );
}
