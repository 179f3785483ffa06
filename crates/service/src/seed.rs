//! Default catalog for a fresh database: the nGomna feature pages, their
//! hero and body copy, shared header and about content, and the features menu.

use configs::ContentConfig;
use models::{image, link, menu, menu_item, page, section, text};
use models::{image::NewImage, text::NewText};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::errors::{step, ServiceError};

/// (name, url, hero line, body copy)
const PAGES: &[(&str, &str, &str, &str)] = &[
    ("Payslips", "/payslips", "Manage and view your payslips securely", "Welcome to the Payslips page. Here you can view and manage your payslips securely."),
    ("Information", "/information", "Access all the information you need", "This is the Information page. Find all the details you need here."),
    ("Notifications", "/notifications", "Stay updated with the latest alerts", "Stay updated with the latest notifications on this page."),
    ("Census", "/census", "Manage census data efficiently", "Welcome to the Census page. Manage census data efficiently."),
    ("Messaging", "/messaging", "Secure messaging for government services", "Send and receive messages securely on the Messaging page."),
    ("Children", "/children", "Manage children information safely", "Manage information about children on this page."),
    ("Security", "/security", "Your security is our priority", "Learn about security measures and manage your settings here."),
    ("OTP", "/otp", "Secure one-time password generation", "Generate and manage OTPs securely on this page."),
    ("DGI", "/dgi", "Tax information and services", "Access DGI-related information and resources here."),
    ("GOV-AI", "/gov-ai", "AI-powered government assistance", "Experience the power of AI-driven government services with our GOV-AI assistant."),
    ("Mission", "/mission", "Our commitment to serving you", "Learn about our mission and goals on this page."),
    ("Vision", "/vision", "Building the future of digital governance", "Discover our vision for the future on this page."),
    ("Perspectives", "/perspectives", "Insights and future outlook", "Explore different perspectives and insights here."),
    ("WhatsApp", "/whatsapp", "Connect with us on WhatsApp", "Connect with us on WhatsApp through this page."),
    ("Email", "/email", "Reach us via email", "Reach out to us via email using the information on this page."),
    ("Facebook", "/facebook", "Follow us on Facebook", "Follow us on Facebook for updates and more."),
];

/// Labels of the first pages, in page order, that get a link and menu item.
const MENU_LABELS: &[&str] = &[
    "payslips", "information", "notifications", "census", "messaging", "children", "security", "OTP", "DGI", "GOV-AI",
];

const ABOUT: &[(&str, &str)] = &[
    ("about.description", "nGomna is a cutting-edge mobile application developed in partnership with government institutions to provide citizens with seamless access to essential services. From payslips to official documents, we're transforming how you interact with government services."),
    ("vision.point1", "Bring Cameroonian public servants closer to government services"),
    ("vision.point2", "Bring ordinary citizens closer to government services"),
    ("vision.point3", "Foundational building block of e-citizenship"),
    ("vision.point4", "Protection of the identity and data of public servants"),
    ("mission.point1", "Download payslips via account using internet-connected phone"),
    ("mission.point2", "Display real-time notifications and payslip status updates"),
    ("mission.point3", "Protect data of every user registered in the system"),
    ("mission.point4", "Support for account reset, installation assistance, and bug tracking"),
    ("future.description", "Expanding our platform with new services to enhance digital sovereignty and secure communications"),
    ("future.service1.title", "Government Messaging"),
    ("future.service1.description", "Secure communications between public servants, reducing reliance on external platforms"),
    ("future.service2.title", "E-Services Integration"),
    ("future.service2.description", "Comprehensive digital services platform for all government interactions"),
    ("future.service3.title", "Data Sovereignty"),
    ("future.service3.description", "State control over citizen data with advanced security measures"),
];

/// Rows written by [`seed_catalog`]. All zero when the catalog was already there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub skipped: bool,
    pub pages: usize,
    pub sections: usize,
    pub texts: usize,
    pub links: usize,
    pub menu_items: usize,
    pub images: usize,
}

/// Insert the default catalog in one transaction. No-op when the menu named
/// by `content.default_menu` already exists.
#[instrument(skip(db, content), fields(menu = %content.default_menu))]
pub async fn seed_catalog(db: &DatabaseConnection, content: &ContentConfig) -> Result<SeedReport, ServiceError> {
    if menu::find_by_title(db, &content.default_menu).await?.is_some() {
        info!("seed_skipped_catalog_present");
        return Ok(SeedReport { skipped: true, ..Default::default() });
    }

    let txn = db.begin().await?;
    match insert_catalog(&txn, &content.default_menu).await {
        Ok(report) => {
            txn.commit().await?;
            info!(pages = report.pages, texts = report.texts, links = report.links, "catalog_seeded");
            Ok(report)
        }
        Err(e) => {
            warn!(error = %e, "seed_rolled_back");
            txn.rollback().await?;
            Err(e)
        }
    }
}

async fn insert_catalog<C: ConnectionTrait>(db: &C, menu_title: &str) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();

    let mut pages = Vec::with_capacity(PAGES.len());
    for &(name, url, _, _) in PAGES {
        pages.push(page::create(db, name, url).await.map_err(step("seed_pages"))?);
    }
    report.pages = pages.len();

    let header = section::create(db, "header").await.map_err(step("seed_sections"))?;
    let hero = section::create(db, "hero").await.map_err(step("seed_sections"))?;
    let about = section::create(db, "about_ngomna").await.map_err(step("seed_sections"))?;
    report.sections = 3;

    let mut texts = vec![
        NewText { title: "nGomna", content: "Bringing citizens closer to government", section_id: Some(header.id), ..Default::default() },
        NewText { title: "nGomna", content: "the citizens closer to the government", page_id: Some(pages[0].id), section_id: Some(hero.id) },
    ];
    for (p, &(_, _, hero_line, _)) in pages.iter().zip(PAGES) {
        texts.push(NewText { title: &p.name, content: hero_line, page_id: Some(p.id), section_id: Some(hero.id) });
    }
    for (p, &(_, _, _, body)) in pages.iter().zip(PAGES) {
        texts.push(NewText { title: &p.name, content: body, page_id: Some(p.id), section_id: None });
    }
    for &(title, content) in ABOUT {
        texts.push(NewText { title, content, section_id: Some(about.id), ..Default::default() });
    }
    for t in &texts {
        text::create(db, t.clone()).await.map_err(step("seed_texts"))?;
    }
    report.texts = texts.len();

    let features = menu::create(db, menu_title).await.map_err(step("seed_menu"))?;
    for (p, &label) in pages.iter().zip(MENU_LABELS) {
        link::create(db, features.id, label, &p.url, Some(p.id)).await.map_err(step("seed_links"))?;
        menu_item::create(db, features.id, label, Some(&p.url), Some(p.id))
            .await
            .map_err(step("seed_menu_items"))?;
        report.links += 1;
        report.menu_items += 1;
    }

    let home = pages[0].id;
    image::create(db, NewImage { name: "ngomna_logo", url: "/ngomna_logo.png", page_id: Some(home), section_id: Some(header.id) })
        .await
        .map_err(step("seed_images"))?;
    image::create(db, NewImage { name: "phone_image", url: "/phone_image.png", page_id: Some(home), section_id: Some(hero.id) })
        .await
        .map_err(step("seed_images"))?;
    report.images = 2;

    Ok(report)
}
