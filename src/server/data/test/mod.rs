mod counter_record;
