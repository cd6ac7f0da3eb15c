#[cfg(feature = "csr")]
fn main() {
    portfolio_site::mount();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; build the client bundle with `trunk serve --features csr`
    // see lib.rs for the mount function instead
}
