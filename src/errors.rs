//! Error types shared by the signer, the credential store and the CLI.

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        TomlDecode(::toml::de::Error);
        TomlEncode(::toml::ser::Error);
    }

    errors {
        // One of access key, secret key or region is empty.
        MissingCredentials(field: &'static str) {
            description("missing credentials")
            display("missing credentials: no {} configured", field)
        }
        InvalidUrl(url: String) {
            description("invalid url")
            display("invalid url: '{}'", url)
        }
        InvalidInput(msg: String) {
            description("invalid input")
            display("invalid input: {}", msg)
        }
    }
}
