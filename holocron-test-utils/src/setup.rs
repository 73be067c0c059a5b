/// Create a [`TestContext`](crate::TestContext) with tables generated from the given entities.
///
/// With no arguments the database is left empty, which is useful to assert that operations
/// fail when their tables are missing.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Character)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let builder = $crate::TestBuilder::new()
                $(.with_table($entity))+;

            builder.build().await
        }.await
    }};
}
