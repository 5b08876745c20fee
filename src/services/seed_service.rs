use crate::dto::auth_dto::CreateUserPayload;
use crate::dto::company_dto::CreateCompanyPayload;
use crate::dto::product_dto::CreateItemPayload;
use crate::error::Result;
use crate::models::category::{CATEGORY_TYPE_PRODUCT, CATEGORY_TYPE_TENDER};
use crate::models::item::ALLOWED_UNITS;
use crate::services::{
    catalog_service::CatalogService, company_service::CompanyService, item_service::ItemService,
    user_service::UserService,
};

pub const DEMO_USER_ID: &str = "demo-user-id";
pub const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "demo123";

const PRODUCT_CATEGORIES: &[&str] = &["Cement", "Steel", "Wood", "Tiles", "Paint", "Other"];
const TENDER_CATEGORIES: &[&str] = &["Construction", "Consultancy", "Supply"];
const COMPANY_TYPES: &[&str] = &["Supplier", "Manufacturer", "Wholesaler", "Renter", "Service Provider"];
const CITIES: &[(&str, &str)] = &[
    ("Addis Ababa", "Addis Ababa"),
    ("Adama", "Oromia"),
    ("Bahir Dar", "Amhara"),
    ("Hawassa", "Sidama"),
    ("Mekelle", "Tigray"),
    ("Dire Dawa", "Dire Dawa"),
];

struct DemoCompany {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    location: &'static str,
    description: &'static str,
    type_index: usize,
}

const COMPANIES: &[DemoCompany] = &[
    DemoCompany {
        id: "company-derba",
        name: "Derba Midroc Cement",
        email: "contact@derba.com",
        phone: "+251 11 123 4567",
        location: "Addis Ababa",
        description: "Leading cement producer in Ethiopia.",
        type_index: 0,
    },
    DemoCompany {
        id: "company-ethiopian-steel",
        name: "Ethiopian Steel",
        email: "info@ethsteel.com",
        phone: "+251 25 111 2233",
        location: "Adama",
        description: "Major steel manufacturer.",
        type_index: 1,
    },
    DemoCompany {
        id: "company-addis-tiles",
        name: "Addis Tiles",
        email: "sales@addistiles.com",
        phone: "+251 11 555 6677",
        location: "Addis Ababa",
        description: "High-quality ceramic tiles.",
        type_index: 0,
    },
    DemoCompany {
        id: "company-forest-products",
        name: "Forest Products",
        email: "info@forestproducts.com",
        phone: "+251 11 888 9900",
        location: "Oromia",
        description: "Supplier of wood and related products.",
        type_index: 0,
    },
];

/// (name, company id, category, price, unit, description)
const PRODUCTS: &[(&str, &str, &str, f64, &str, &str)] = &[
    (
        "Portland Cement Grade 42.5",
        "company-derba",
        "Cement",
        850.0,
        "bag",
        "Ordinary Portland cement for structural concrete.",
    ),
    (
        "Reinforcement Bar 12mm",
        "company-ethiopian-steel",
        "Steel",
        95000.0,
        "ton",
        "Deformed steel rebar, 12 m lengths.",
    ),
    (
        "Ceramic Floor Tile 60x60",
        "company-addis-tiles",
        "Tiles",
        1200.0,
        "m²",
        "Glazed porcelain floor tiles.",
    ),
    (
        "Eucalyptus Timber",
        "company-forest-products",
        "Wood",
        450.0,
        "piece",
        "Treated eucalyptus poles for scaffolding.",
    ),
];

pub fn slug_id(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name.to_lowercase().replace(char::is_whitespace, "-"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadySeeded,
}

/// Demo data for a fresh install. Safe to call repeatedly.
#[derive(Clone)]
pub struct SeedService {
    users: UserService,
    companies: CompanyService,
    items: ItemService,
    catalog: CatalogService,
}

impl SeedService {
    pub fn new(
        users: UserService,
        companies: CompanyService,
        items: ItemService,
        catalog: CatalogService,
    ) -> Self {
        Self {
            users,
            companies,
            items,
            catalog,
        }
    }

    pub async fn seed(&self) -> Result<SeedOutcome> {
        if self.items.count().await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let demo = match self.users.get_by_username(DEMO_USERNAME).await? {
            Some(user) => user,
            None => {
                self.users
                    .create_with_id(
                        DEMO_USER_ID,
                        CreateUserPayload {
                            username: DEMO_USERNAME.to_string(),
                            password: DEMO_PASSWORD.to_string(),
                            full_name: Some("Demo User".to_string()),
                            ..Default::default()
                        },
                    )
                    .await?
            }
        };

        for name in PRODUCT_CATEGORIES {
            self.catalog
                .ensure_category(&slug_id("category", name), name, CATEGORY_TYPE_PRODUCT)
                .await?;
        }
        for name in TENDER_CATEGORIES {
            self.catalog
                .ensure_category(&slug_id("tender-category", name), name, CATEGORY_TYPE_TENDER)
                .await?;
        }

        let mut company_types = Vec::with_capacity(COMPANY_TYPES.len());
        for name in COMPANY_TYPES {
            company_types.push(
                self.catalog
                    .ensure_company_type(&slug_id("company-type", name), name)
                    .await?,
            );
        }

        for (city, region) in CITIES {
            self.catalog
                .ensure_city(&slug_id("city", city), city, Some(region))
                .await?;
        }
        for (i, unit) in ALLOWED_UNITS.iter().enumerate() {
            self.catalog.ensure_unit(&format!("unit-{}", i + 1), unit).await?;
        }

        for company in COMPANIES {
            if self.companies.find_by_id(company.id).await?.is_some() {
                continue;
            }
            let company_type = &company_types[company.type_index];
            self.companies
                .create_with_id(
                    company.id,
                    &demo.id,
                    CreateCompanyPayload {
                        name: company.name.to_string(),
                        type_id: Some(company_type.id.clone()),
                        company_type: Some(company_type.name.clone()),
                        email: Some(company.email.to_string()),
                        phone: Some(company.phone.to_string()),
                        location: Some(company.location.to_string()),
                        description: Some(company.description.to_string()),
                        ..Default::default()
                    },
                )
                .await?;
        }

        for (name, company_id, category, price, unit, description) in PRODUCTS {
            self.items
                .create(
                    &demo.id,
                    CreateItemPayload {
                        name: name.to_string(),
                        company_id: company_id.to_string(),
                        category_id: slug_id("category", category),
                        price: Some(*price),
                        unit: unit.to_string(),
                        description: Some(description.to_string()),
                        image_urls: Vec::new(),
                    },
                )
                .await?;
        }

        tracing::info!(user_id = %demo.id, "demo data seeded");
        Ok(SeedOutcome::Seeded)
    }
}
