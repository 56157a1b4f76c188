use urlcanon::Url;

fn main() {
    // Parse and canonicalize a URL
    let url = Url::parse("HTTPS://Example.com:443/docs/./guide/../index.html?lang=en#intro");

    println!("URL: {}", url.href()); // https://example.com/docs/index.html?lang=en#intro
    println!("Protocol: {}", url.protocol()); // https
    println!("Host: {}", url.host()); // example.com
    println!("Port: {:?}", url.port()); // None
    println!("Path: {}", url.path()); // /docs/index.html
    println!("Query: {:?}", url.query()); // Some("lang=en")
    println!("Fragment: {:?}", url.fragment()); // Some("intro")
    println!();

    // Resolve links found on the page
    for link in ["setup.html", "../blog/", "/search?q=url", "#faq", "//cdn.example.net/a.js"] {
        println!("{link} -> {}", url.resolve(link)); // setup.html -> https://example.com/docs/setup.html ...
    }
    println!();

    // Malformed input is kept verbatim in an invalid URL
    let bad = Url::parse("http://exa mple.com/");
    println!("valid: {}, text: {}", bad.is_valid(), bad); // valid: false, text: http://exa mple.com/

    // Use str::parse to learn why
    if let Err(err) = "http://exa mple.com/".parse::<Url>() {
        println!("error: {err}"); // error: Invalid character in authority
    }
    println!();

    // Query parameters borrow the URL text
    for (name, value) in url.query_parameters() {
        println!("  {name} = {value}"); // lang = en
    }
}
