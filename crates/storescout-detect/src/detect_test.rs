use super::*;

#[test]
fn empty_markup_matches_nothing() {
    assert!(detect_platforms("").is_empty());
}

#[test]
fn unrelated_markup_matches_nothing() {
    let html = "<html><body><h1>Company history</h1><p>Founded in 1987.</p></body></html>";
    assert!(detect_platforms(html).is_empty());
}

#[test]
fn shopify_cdn_reference_is_detected() {
    let html = r#"<script src="https://cdn.shopify.com/s/files/1/0001/theme.js"></script>"#;
    assert_eq!(detect_platforms(html), vec!["Shopify"]);
}

#[test]
fn matching_is_case_insensitive() {
    let html = r#"<SCRIPT SRC="HTTPS://CDN.SHOPIFY.COM/THEME.JS"></SCRIPT>"#;
    assert_eq!(detect_platforms(html), vec!["Shopify"]);
}

#[test]
fn multiple_matches_preserve_table_order() {
    // Magento marker placed before the Shopify marker in the document;
    // output order must still be table order, not document order.
    let html = r#"
        <script type="text/x-magento-init">{}</script>
        <link href="https://cdn.shopify.com/style.css">
    "#;
    assert_eq!(detect_platforms(html), vec!["Shopify", "Magento"]);
}

#[test]
fn woocommerce_without_commerce_context_is_suppressed() {
    // A WordPress blog pulling in WooCommerce plugin assets, but nothing
    // cart- or shop-related anywhere in the page.
    let html = r#"<html class="woocommerce-no-js"><body>just a blog</body></html>"#;
    assert!(detect_platforms(html).is_empty());
}

#[test]
fn woocommerce_with_commerce_context_is_reported() {
    let html = r#"<html class="woocommerce-no-js"><body><a href="/shop">Shop</a></body></html>"#;
    assert_eq!(detect_platforms(html), vec!["WooCommerce"]);
}

#[test]
fn woocommerce_accepts_spanish_context_tokens() {
    let html = r#"<html class="woocommerce-no-js"><body><a href="/carrito">Ver carrito</a></body></html>"#;
    assert_eq!(detect_platforms(html), vec!["WooCommerce"]);
}

#[test]
fn every_platform_is_reachable_from_its_first_marker() {
    // One representative literal per platform. WooCommerce gets a context
    // token appended so its confirmation predicate passes.
    let cases: &[(&str, &str)] = &[
        ("Shopify", "cdn.shopify.com"),
        ("Salesforce Commerce Cloud", "dwvar_color"),
        ("Magento", "text/x-magento-init"),
        ("WooCommerce", "wp-content/plugins/woocommerce shop"),
        ("PrestaShop", "var prestashop ="),
        ("VTEX", "vtexassets.com"),
        ("BigCommerce", "cdn11.bigcommerce.com"),
        ("Wix", "wix-ecommerce"),
        ("Squarespace", "squarespace-cart"),
        ("Odoo", "website_sale.cart"),
    ];

    for (platform, snippet) in cases {
        let html = format!("<html><body>{snippet}</body></html>");
        let found = detect_platforms(&html);
        assert!(
            found.contains(platform),
            "expected {platform} for snippet {snippet:?}, got: {found:?}"
        );
    }
}

#[test]
fn prestashop_meta_generator_quoting_variants_match() {
    let double = r#"<meta name="generator" content="prestashop">"#;
    let single = r#"<meta name='generator' content='prestashop'>"#;
    assert_eq!(detect_platforms(double), vec!["PrestaShop"]);
    assert_eq!(detect_platforms(single), vec!["PrestaShop"]);
}

#[test]
fn literal_dots_do_not_match_arbitrary_characters() {
    // "cdn-shopify-com" must not satisfy the escaped-dot pattern
    // cdn\.shopify\.com.
    let html = "<body>cdn-shopify-com</body>";
    assert!(detect_platforms(html).is_empty());
}
