use contracts::shared::master_data::PageResult;

use crate::shared::error::{ServiceError, ServiceResult};

/// Проверка параметров страницы: `page >= 1`, `limit >= 1`
pub fn validate_page(page: usize, limit: usize) -> ServiceResult<()> {
    if page == 0 {
        return Err(ServiceError::validation("page", "page must be >= 1"));
    }
    if limit == 0 {
        return Err(ServiceError::validation("limit", "limit must be >= 1"));
    }
    Ok(())
}

/// Вырезать страницу из уже отфильтрованной коллекции
///
/// Страница за пределами коллекции возвращает пустые данные с корректным `total`.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> ServiceResult<PageResult<T>> {
    validate_page(page, limit)?;

    let total = items.len();
    let offset = (page - 1).saturating_mul(limit);
    let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();

    Ok(PageResult::new(data, total, page, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sizes_follow_formula() {
        let total = 23usize;
        for limit in 1..=25usize {
            for page in 1..=30usize {
                let result = paginate((0..total).collect::<Vec<_>>(), page, limit).unwrap();
                let expected = limit.min(total.saturating_sub((page - 1) * limit));
                assert_eq!(result.data.len(), expected, "page={page} limit={limit}");
                assert_eq!(result.total, total);
                assert_eq!(result.total_pages, total.div_ceil(limit));
            }
        }
    }

    #[test]
    fn test_second_page_continues_first() {
        let result = paginate((1..=10).collect::<Vec<_>>(), 2, 4).unwrap();
        assert_eq!(result.data, vec![5, 6, 7, 8]);
        assert_eq!(result.page, 2);
        assert_eq!(result.limit, 4);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let result = paginate(Vec::<u8>::new(), 1, 10).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_invalid_page_params() {
        assert!(matches!(
            paginate(vec![1], 0, 10),
            Err(ServiceError::Validation { ref field, .. }) if field == "page"
        ));
        assert!(matches!(
            paginate(vec![1], 1, 0),
            Err(ServiceError::Validation { ref field, .. }) if field == "limit"
        ));
    }
}
