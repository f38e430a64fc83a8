use ropevec::RopeVec;

#[test]
fn test_capacity_grows_by_chunks() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();
    assert_eq!(rope.capacity(), 0);

    rope.push_back(1).unwrap();
    assert_eq!(rope.capacity(), 4);

    for value in 2..=5 {
        rope.push_back(value).unwrap();
    }
    assert_eq!(rope.capacity(), 8);
    assert_eq!(rope.chunk_count(), 2);
}

#[test]
fn test_capacity_after_front_growth() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();
    rope.push_back(1).unwrap();
    rope.insert(0, 0).unwrap();

    // Two chunks, three unused slots before the first element.
    assert_eq!(rope.live_chunk_count(), 2);
    assert_eq!(rope.capacity(), 5);
    assert_eq!(rope, [0, 1]);
}

#[test]
fn test_reserve_does_not_change_length() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();

    rope.reserve(10).unwrap();
    assert_eq!(rope.len(), 0);
    assert_eq!(rope.capacity(), 12);
    assert_eq!(rope.chunk_count(), 3);

    rope.reserve(3).unwrap();
    assert_eq!(rope.capacity(), 12);

    rope.reserve(0).unwrap();
    assert_eq!(rope.chunk_count(), 3);
}

#[test]
fn test_reserve_avoids_further_allocation() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();
    rope.reserve(9).unwrap();
    let chunks = rope.chunk_count();

    for value in 0..9 {
        rope.push_back(value).unwrap();
    }
    assert_eq!(rope.chunk_count(), chunks);
}

#[test]
fn test_reserve_counts_from_start_offset() {
    let mut rope: RopeVec<u32, 4> = (0..4).collect();
    rope.erase_front().unwrap();
    rope.erase_front().unwrap();
    assert_eq!(rope.capacity(), 2);

    rope.reserve(6).unwrap();
    assert_eq!(rope.capacity(), 6);
    assert_eq!(rope.live_chunk_count(), 2);
    assert_eq!(rope, [2, 3]);
}

#[test]
fn test_with_capacity() {
    let rope = RopeVec::<u32, 4>::with_capacity(5).unwrap();
    assert!(rope.is_empty());
    assert_eq!(rope.capacity(), 8);

    let rope = RopeVec::<u32, 4>::with_capacity(0).unwrap();
    assert_eq!(rope.chunk_count(), 0);
}

#[test]
fn test_shrink_to_fit_releases_trailing_chunks() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();
    rope.reserve(20).unwrap();
    rope.push_back(1).unwrap();
    rope.push_back(2).unwrap();
    assert_eq!(rope.chunk_count(), 5);

    rope.shrink_to_fit();
    assert_eq!(rope.chunk_count(), 1);
    assert_eq!(rope.capacity(), 4);
    assert_eq!(rope, [1, 2]);
}

#[test]
fn test_shrink_to_fit_after_resize() {
    let mut rope: RopeVec<u32, 4> = RopeVec::new();
    rope.resize(16).unwrap();
    rope.resize(5).unwrap();
    assert_eq!(rope.chunk_count(), 4);

    rope.shrink_to_fit();
    assert_eq!(rope.chunk_count(), 2);
    assert_eq!(rope.len(), 5);
}

#[test]
fn test_shrink_to_fit_keeps_live_front_chunk() {
    let mut rope: RopeVec<u32, 4> = (0..8).collect();
    rope.insert(0, 100).unwrap();

    rope.shrink_to_fit();
    assert_eq!(rope.chunk_count(), 3);
    assert_eq!(rope[0], 100);
    assert_eq!(rope.len(), 9);
}

#[test]
fn test_shrink_to_fit_compacts_released_front() {
    let mut rope: RopeVec<u32, 4> = (0..12).collect();
    for _ in 0..9 {
        rope.erase_front().unwrap();
    }
    assert_eq!(rope.chunk_count(), 3);
    assert_eq!(rope.live_chunk_count(), 1);

    rope.shrink_to_fit();
    assert_eq!(rope.chunk_count(), 1);
    assert_eq!(rope, [9, 10, 11]);

    rope.insert(0, 8).unwrap();
    assert_eq!(rope, [8, 9, 10, 11]);
}

#[test]
fn test_shrink_to_fit_on_empty_releases_everything() {
    let mut rope: RopeVec<u32, 4> = (0..6).collect();
    for _ in 0..6 {
        rope.erase_front().unwrap();
    }

    rope.shrink_to_fit();
    assert_eq!(rope.chunk_count(), 0);
    assert_eq!(rope.capacity(), 0);

    rope.push_back(1).unwrap();
    assert_eq!(rope, [1]);
}

#[test]
fn test_front_growth_reuses_released_position() {
    let mut rope: RopeVec<u32, 4> = (0..8).collect();
    for _ in 0..4 {
        rope.erase_front().unwrap();
    }
    assert_eq!(rope.chunk_count(), 2);
    assert_eq!(rope.live_chunk_count(), 1);

    rope.insert(0, 3).unwrap();
    assert_eq!(rope.chunk_count(), 2);
    assert_eq!(rope.live_chunk_count(), 2);
    assert_eq!(rope, [3, 4, 5, 6, 7]);
}
