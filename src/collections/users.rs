use crate::schema::{AdminGroup, CollectionConfig, Field, ReadAccess};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("users", AdminGroup::Admin)
        .use_as_title("email")
        .read(ReadAccess::Authenticated)
        .auth()
        .fields(vec![
            Field::email("email").label("E-posta").required().unique(),
            Field::text("name").label("Ad Soyad"),
        ])
}
