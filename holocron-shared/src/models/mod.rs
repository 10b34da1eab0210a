/// Catalog data models
///
/// One module per record type:
///
/// - `user`: account records (signup/delete via the API)
/// - `person`: catalog people (seeded by schema provisioning)
/// - `planet`: catalog planets (seeded by schema provisioning)
/// - `favorite`: the user→person and user→planet join records

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
