mod config;
mod generate;

/// A small configuration so the generated images stay cheap to encode.
pub const SMALL_CONFIG: &str =
    //language=TOML
    r##"
    product = "acme"
    source = "icon.png"

    [[icons]]
    size = 64

    [[icons]]
    size = 16
    qualifier = "mdpi"

    [screenshots]
    background = "#a84d36"

    [[screenshots.devices]]
    name = "phone"
    label = "Phone"
    width = 108
    height = 192
    icon-size = 80

    [[screenshots.devices]]
    name = "tablet"
    label = "Tablet"
    width = 153
    height = 204
    icon-size = 120
    count = 1
    "##;
