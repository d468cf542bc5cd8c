mod property_codec;
