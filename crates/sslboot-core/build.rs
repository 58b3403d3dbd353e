use std::env;

/// OPENSSL_VERSION_NUMBER for 3.0.0, the first release with the provider
/// architecture.
const PROVIDER_API_VERSION: u64 = 0x3000_0000;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(ossl3)");

    // openssl-sys emits the version of the linked library as links
    // metadata. LibreSSL and BoringSSL report through different keys and
    // never get the provider cfg.
    if let Ok(version) = env::var("DEP_OPENSSL_VERSION_NUMBER") {
        let version = u64::from_str_radix(&version, 16).unwrap_or(0);
        if version >= PROVIDER_API_VERSION {
            println!("cargo:rustc-cfg=ossl3");
        }
    }

    println!("cargo:rerun-if-env-changed=DEP_OPENSSL_VERSION_NUMBER");
}
