//! Static signature table mapping e-commerce platforms to markup patterns.
//!
//! New platforms are added as table entries, not matcher changes. Table
//! order is precedence order: callers treat the first matched entry as the
//! primary classification.

use std::sync::LazyLock;

use regex::Regex;

/// A platform's diagnostic fingerprint.
///
/// `patterns` are regexes evaluated against the lowercased markup; any
/// single match tentatively includes the platform. `confirm`, when set, is
/// an extra gate over the same lowercased markup that must also accept
/// before the platform is reported.
pub struct PlatformSignature {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub confirm: Option<fn(&str) -> bool>,
}

/// Tokens that distinguish an actual storefront from a site that merely
/// ships WooCommerce plugin assets (blogs, agency sites, theme demos).
const COMMERCE_CONTEXT_TOKENS: &[&str] = &["cart", "carrito", "basket", "shop", "tienda"];

fn has_commerce_context(html_lower: &str) -> bool {
    COMMERCE_CONTEXT_TOKENS
        .iter()
        .any(|token| html_lower.contains(token))
}

/// Ordered platform signature table.
pub const SIGNATURES: &[PlatformSignature] = &[
    PlatformSignature {
        name: "Shopify",
        patterns: &[
            r"cdn\.shopify\.com",
            r"shopify\.theme",
            r"shopify-checkout",
            r"myshopify\.com",
        ],
        confirm: None,
    },
    PlatformSignature {
        name: "Salesforce Commerce Cloud",
        patterns: &[
            r"dwvar_",
            r"dw\.ac",
            r"\.demandware\.net",
            r"demandware\.store",
            r"edge\.quantity",
        ],
        confirm: None,
    },
    PlatformSignature {
        name: "Magento",
        patterns: &[
            r"text/x-magento-init",
            r"mage/captcha",
            r"checkout/cart",
            r"magento_version",
            r"static/frontend",
        ],
        confirm: None,
    },
    PlatformSignature {
        name: "WooCommerce",
        patterns: &[
            r"wc-cart-fragments",
            r"woocommerce-no-js",
            r"wp-content/plugins/woocommerce",
        ],
        confirm: Some(has_commerce_context),
    },
    PlatformSignature {
        name: "PrestaShop",
        patterns: &[
            r"var prestashop =",
            r#"content=["']prestashop["']"#,
            r"prestashop-icon",
        ],
        confirm: None,
    },
    PlatformSignature {
        name: "VTEX",
        patterns: &[r"vtexassets\.com", r"vtex-io", r"vtex\.cmc"],
        confirm: None,
    },
    PlatformSignature {
        name: "BigCommerce",
        patterns: &[r"cdn11\.bigcommerce\.com", r"stencil-config"],
        confirm: None,
    },
    PlatformSignature {
        name: "Wix",
        patterns: &[r"wix-ecommerce", r"wix-store-fixed"],
        confirm: None,
    },
    PlatformSignature {
        name: "Squarespace",
        patterns: &[
            r"squarespace-cart",
            r"sqs-shopping-cart",
            r"static\.squarespace\.com",
        ],
        confirm: None,
    },
    PlatformSignature {
        name: "Odoo",
        patterns: &[r"website_sale\.cart", r"website\.assets_frontend"],
        confirm: None,
    },
];

pub(crate) struct CompiledSignature {
    pub name: &'static str,
    pub patterns: Vec<Regex>,
    pub confirm: Option<fn(&str) -> bool>,
}

/// Signature table with patterns compiled once, process-wide.
pub(crate) static COMPILED: LazyLock<Vec<CompiledSignature>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|sig| CompiledSignature {
            name: sig.name,
            patterns: sig
                .patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid signature regex"))
                .collect(),
            confirm: sig.confirm,
        })
        .collect()
});
