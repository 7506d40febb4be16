mod memory_user_cache;
