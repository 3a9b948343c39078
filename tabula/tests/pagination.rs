use std::cell::RefCell;
use std::rc::Rc;

use tabula::prelude::*;

fn recording(current: usize, page_size: usize, total: usize) -> (Pagination, Rc<RefCell<Vec<(usize, usize)>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let pagination = Pagination::new(current, page_size, total)
        .map(|p| p.on_change(move |page, size| sink.borrow_mut().push((page, size))))
        .unwrap();
    (pagination, calls)
}

#[test]
fn test_page_count_and_window() {
    let (pagination, _) = recording(1, 2, 5);
    assert_eq!(pagination.page_count(), 3);
    assert_eq!(
        pagination.window(),
        PageWindow {
            start: 1,
            end: 2,
            total: 5
        }
    );
    assert_eq!(pagination.window().to_string(), "Showing 1 to 2 of 5 entries");
}

#[test]
fn test_last_page_window_is_partial() {
    let (pagination, _) = recording(3, 2, 5);
    let window = pagination.window();
    assert_eq!((window.start, window.end), (5, 5));
    assert_eq!(pagination.page_range(), 4..5);
    assert!(!pagination.has_next());
    assert!(pagination.has_previous());
}

#[test]
fn test_out_of_range_requests_are_rejected() {
    let (mut pagination, calls) = recording(1, 2, 5);

    assert_eq!(
        pagination.request_page(0),
        Err(PaginationError::OutOfRange {
            requested: 0,
            page_count: 3
        })
    );
    assert_eq!(
        pagination.request_page(4),
        Err(PaginationError::OutOfRange {
            requested: 4,
            page_count: 3
        })
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_valid_request_calls_back_without_moving() {
    let (mut pagination, calls) = recording(1, 2, 5);
    assert_eq!(pagination.request_page(2), Ok(()));
    assert_eq!(*calls.borrow(), vec![(2, 2)]);
    // Display-only: the owner feeds the new page back
    assert_eq!(pagination.current(), 1);

    pagination.set_current(2);
    assert_eq!(pagination.current(), 2);
}

#[test]
fn test_previous_and_next() {
    let (mut pagination, calls) = recording(1, 2, 5);
    assert!(pagination.previous_page().is_err());
    assert!(pagination.next_page().is_ok());
    assert_eq!(*calls.borrow(), vec![(2, 2)]);
}

#[test]
fn test_zero_page_size_is_rejected() {
    assert_eq!(Pagination::new(1, 0, 10).err(), Some(PaginationError::ZeroPageSize));
}

#[test]
fn test_current_is_clamped() {
    let pagination = Pagination::new(9, 10, 25).unwrap();
    assert_eq!(pagination.current(), 3);
    let pagination = Pagination::new(0, 10, 25).unwrap();
    assert_eq!(pagination.current(), 1);
}

#[test]
fn test_empty_total() {
    let (mut pagination, calls) = recording(1, 10, 0);
    assert_eq!(pagination.window().to_string(), "Showing 0 to 0 of 0 entries");
    assert!(!pagination.has_next());
    assert!(!pagination.has_previous());
    assert_eq!(pagination.page_count(), 0);
    assert!(pagination.request_page(1).is_err());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_set_total_clamps_current() {
    let mut pagination = Pagination::new(3, 2, 6).unwrap();
    pagination.set_total(2);
    assert_eq!(pagination.current(), 1);
    assert_eq!(pagination.page_count(), 1);
}

#[test]
fn test_table_without_pagination_rejects_requests() {
    let columns = vec![Column::new("n", "N", |n: &u32| (*n).into())];
    let mut table = DataTable::new(vec![1u32, 2], columns, DataTableConfig::new());
    assert_eq!(table.request_page(1), Err(PaginationError::NotPaginated));
}

#[test]
fn test_table_forwards_page_requests() {
    let (pagination, calls) = recording(1, 2, 5);
    let columns = vec![Column::new("n", "N", |n: &u32| (*n).into())];
    let config = DataTableConfig::new().pagination(pagination);
    let mut table = DataTable::new(vec![1u32, 2], columns, config);

    assert!(table.request_page(3).is_ok());
    assert!(table.request_page(4).is_err());
    assert_eq!(*calls.borrow(), vec![(3, 2)]);
}

#[test]
fn test_huge_page_sizes_do_not_overflow() {
    let page_size = usize::MAX / 2 + 1;
    let pagination = Pagination::new(2, page_size, usize::MAX).unwrap();
    assert_eq!(pagination.page_count(), 2);
    assert_eq!(pagination.page_range(), page_size..usize::MAX);
    assert_eq!(
        pagination.window(),
        PageWindow {
            start: page_size + 1,
            end: usize::MAX,
            total: usize::MAX,
        }
    );
    assert!(!pagination.has_next());
}
