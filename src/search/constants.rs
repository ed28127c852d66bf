// Upper bound on memoized sub-multisets kept by a memoizing search
pub const MAX_CACHE_SIZE: usize = 100_000;
