//! SQL builder helpers for catalog queries.

use common::catalog::{AttributeFilter, Category};

pub const SQL_PRODUCT_FROM_CLAUSE: &'static str = "
    FROM store_product AS p
    INNER JOIN store_product_category_ref AS c
    ON c.product = p.id
";


fn join_ids<'a>(ids: impl IntoIterator<Item = &'a u64>) -> String {
    ids.into_iter().map(|id| id.to_string()).collect::<Vec<String>>().join(", ")
}

pub fn build_count_where_clause(
    category: &Category,
    manufacturers: Option<&[u64]>,
    attributes: &AttributeFilter,
) -> String {
    let mut terms = vec![
        "WHERE p.is_active = 1".to_string(),
        format!("c.category = {}", category.id),
    ];

    if let Some(manufacturers) = manufacturers {
        if manufacturers.is_empty() {
            terms.push("0 = 1".to_string());
        } else {
            terms.push(format!("p.manufacturer_id IN ({})", join_ids(manufacturers)));
        }
    }

    for (attribute_name, option_ids) in attributes.iter() {
        if option_ids.is_empty() {
            continue;
        }
        terms.push(format!(
            "p.id IN (
            SELECT entity
            FROM store_product_attribute_eav
            WHERE attribute = {}
            AND value IN ({})
        )",
            format_sql_query::QuotedData(attribute_name),
            join_ids(option_ids),
        ));
    }

    terms.join("
        AND ")
}

pub fn build_count_sql(category: &Category, manufacturers: Option<&[u64]>, attributes: &AttributeFilter) -> String {
    let sql_where_clause = build_count_where_clause(category, manufacturers, attributes);
    format!(
        "
        SELECT count(DISTINCT p.id) AS total_count
        {SQL_PRODUCT_FROM_CLAUSE}
        {sql_where_clause}
        ;",
    )
}

/// Counts per manufacturer; manufacturers without matching products yield no row.
pub fn build_count_per_manufacturer_sql(category: &Category, manufacturers: &[u64], attributes: &AttributeFilter) -> String {
    let sql_where_clause = build_count_where_clause(category, Some(manufacturers), attributes);
    format!(
        "
        SELECT assumeNotNull(p.manufacturer_id) AS manufacturer_id, count(DISTINCT p.id) AS total_count
        {SQL_PRODUCT_FROM_CLAUSE}
        {sql_where_clause}
        GROUP BY manufacturer_id
        ORDER BY manufacturer_id
        ;",
    )
}

pub fn build_category_manufacturers_sql(category: &Category) -> String {
    format!(
        "
        SELECT id, name
        FROM store_manufacturer
        WHERE id IN (
            SELECT p.manufacturer_id
            {SQL_PRODUCT_FROM_CLAUSE}
            WHERE p.is_active = 1
            AND c.category = {}
            AND p.manufacturer_id IS NOT NULL
        )
        ORDER BY id
        ;",
        category.id,
    )
}

pub fn build_category_attributes_sql(category: &Category) -> String {
    format!(
        "
        SELECT a.id, a.name, a.title, a.select_many
        FROM store_attribute AS a
        INNER JOIN store_category_attribute AS ca
        ON ca.attribute_id = a.id
        WHERE ca.category = {}
        ORDER BY a.position, a.id
        ;",
        category.id,
    )
}

pub fn build_attribute_options_sql(attribute_ids: &[u64]) -> String {
    format!(
        "
        SELECT id, attribute_id, value
        FROM store_attribute_option
        WHERE attribute_id IN ({})
        ORDER BY position, id
        ;",
        join_ids(attribute_ids),
    )
}
