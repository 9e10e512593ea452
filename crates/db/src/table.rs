use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recommendation {
    Table,
    Id,
    Name,
    Profession,
}

#[derive(Iden, Clone)]
pub enum Step {
    Table,
    Id,
    Title,
    RecommendationId,
}

/// `RecommendationId` references a [`Step`], not a [`Recommendation`].
#[derive(Iden, Clone)]
pub enum Bullet {
    Table,
    Id,
    Description,
    LinkName,
    Link,
    RecommendationId,
}
